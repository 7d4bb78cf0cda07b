#[must_use]
pub fn format_date_br(
  iso_date: &str
) -> String {
  if iso_date.is_empty() {
    return String::new();
  }

  let mut parts =
    iso_date.splitn(3, '-');
  match (
    parts.next(),
    parts.next(),
    parts.next()
  ) {
    | (
      Some(year),
      Some(month),
      Some(day)
    ) => {
      format!("{day}/{month}/{year}")
    }
    | _ => iso_date.to_string()
  }
}

#[must_use]
pub fn is_overdue(
  due_date: &str,
  today: &str
) -> bool {
  !due_date.is_empty()
    && due_date < today
}

#[cfg(test)]
mod tests {
  use super::{
    format_date_br,
    is_overdue
  };

  #[test]
  fn reorders_iso_date_for_display() {
    assert_eq!(
      format_date_br("2000-01-01"),
      "01/01/2000"
    );
    assert_eq!(
      format_date_br("2026-12-05"),
      "05/12/2026"
    );
  }

  #[test]
  fn empty_date_displays_empty() {
    assert_eq!(format_date_br(""), "");
  }

  #[test]
  fn partial_date_passes_through() {
    assert_eq!(
      format_date_br("2026"),
      "2026"
    );
  }

  #[test]
  fn overdue_is_strictly_before_today()
  {
    assert!(is_overdue(
      "2023-12-31",
      "2024-01-01"
    ));
    assert!(!is_overdue(
      "2024-01-01",
      "2024-01-01"
    ));
    assert!(!is_overdue(
      "2024-01-02",
      "2024-01-01"
    ));
  }

  #[test]
  fn missing_due_date_is_not_overdue()
  {
    assert!(!is_overdue(
      "",
      "2024-01-01"
    ));
  }
}
