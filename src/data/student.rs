use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i32,
    pub last_name: String,
    pub first_mid_name: String,
    pub enrollment_date: NaiveDate,
}

/// The caller-writable subset of a student row. The id always comes from the
/// store, never from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub last_name: String,
    pub first_mid_name: String,
    pub enrollment_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub credits: i32,
}

#[derive(Debug, Clone)]
pub struct Enrollment {
    pub id: i32,
    pub course: Course,
    pub grade: Option<String>,
}

/// One student with their enrollments, each enrollment carrying its course.
#[derive(Debug, Clone)]
pub struct StudentDetail {
    pub student: Student,
    pub enrollments: Vec<Enrollment>,
}

/// Raw form input for create/edit. Only these three fields exist, so nothing
/// else can be bound onto an entity no matter what the request carries.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentForm {
    pub last_name: String,
    pub first_mid_name: String,
    pub enrollment_date: String,
}

impl StudentForm {
    pub fn validate(&self) -> Result<NewStudent, Vec<String>> {
        let mut errors = Vec::new();

        if self.last_name.trim().is_empty() {
            errors.push("The Last Name field is required.".to_owned());
        }
        if self.first_mid_name.trim().is_empty() {
            errors.push("The First Mid Name field is required.".to_owned());
        }

        let enrollment_date = match NaiveDate::parse_from_str(&self.enrollment_date, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push("The Enrollment Date field must be a valid date.".to_owned());
                None
            }
        };

        match enrollment_date {
            Some(enrollment_date) if errors.is_empty() => Ok(NewStudent {
                last_name: self.last_name.clone(),
                first_mid_name: self.first_mid_name.clone(),
                enrollment_date,
            }),
            _ => Err(errors),
        }
    }
}

/// Sort keys the student list understands. Unknown keys fall back to the
/// default surname ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentSort {
    #[default]
    NameAsc,
    NameDesc,
    DateAsc,
    DateDesc,
}

impl StudentSort {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("name_desc") => Self::NameDesc,
            Some("Date") => Self::DateAsc,
            Some("date_desc") => Self::DateDesc,
            _ => Self::NameAsc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_params_fall_back_to_name_ascending() {
        assert_eq!(StudentSort::from_param(None), StudentSort::NameAsc);
        assert_eq!(StudentSort::from_param(Some("")), StudentSort::NameAsc);
        assert_eq!(StudentSort::from_param(Some("bogus")), StudentSort::NameAsc);
        assert_eq!(StudentSort::from_param(Some("date")), StudentSort::NameAsc);
    }

    #[test]
    fn known_sort_params_parse() {
        assert_eq!(
            StudentSort::from_param(Some("name_desc")),
            StudentSort::NameDesc
        );
        assert_eq!(StudentSort::from_param(Some("Date")), StudentSort::DateAsc);
        assert_eq!(
            StudentSort::from_param(Some("date_desc")),
            StudentSort::DateDesc
        );
    }

    #[test]
    fn validation_requires_both_names_and_a_date() {
        let form = StudentForm {
            last_name: String::new(),
            first_mid_name: "  ".to_owned(),
            enrollment_date: "not-a-date".to_owned(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);

        let form = StudentForm {
            last_name: "Alexander".to_owned(),
            first_mid_name: "Carson".to_owned(),
            enrollment_date: "2005-09-01".to_owned(),
        };
        let new = form.validate().unwrap();
        assert_eq!(new.last_name, "Alexander");
        assert_eq!(
            new.enrollment_date,
            NaiveDate::from_ymd_opt(2005, 9, 1).unwrap()
        );
    }
}
