use crate::{
    data::student::{Course, Enrollment, NewStudent, Student, StudentDetail, StudentSort},
    error::{MakeQuerySnafu, RegistrarResult},
};
use snafu::{ResultExt, Snafu};
use sqlx::{PgConnection, prelude::FromRow};

const STUDENT_COLUMNS: &str = "id, last_name, first_mid_name, enrollment_date";

pub type WriteResult<T> = Result<T, WriteError>;

/// Failure signal from an insert/update/remove. Kept separate from
/// `RegistrarError` so every mutating call site has to handle it explicitly
/// instead of letting it bubble to the error page.
#[derive(Debug, Snafu)]
pub enum WriteError {
    #[snafu(display("database rejected the write"))]
    Database { source: sqlx::Error },
    #[cfg(test)]
    #[snafu(display("store rejected the write"))]
    Rejected,
}

/// The persistence seam for student records. Each record operation borrows
/// one of these for the duration of a single request; read failures
/// propagate, write failures come back as [`WriteError`].
pub trait StudentStore {
    /// Filter by substring first, then sort, composed before materializing.
    async fn list(
        &mut self,
        sort: StudentSort,
        search: Option<&str>,
    ) -> RegistrarResult<Vec<Student>>;
    async fn get(&mut self, id: i32) -> RegistrarResult<Option<Student>>;
    async fn get_detail(&mut self, id: i32) -> RegistrarResult<Option<StudentDetail>>;
    /// Returns the id the store assigned.
    async fn insert(&mut self, new: &NewStudent) -> WriteResult<i32>;
    async fn update(&mut self, student: &Student) -> WriteResult<()>;
    async fn remove(&mut self, id: i32) -> WriteResult<()>;
}

#[derive(FromRow)]
struct EnrollmentRow {
    id: i32,
    grade: Option<String>,
    course_id: i32,
    title: String,
    credits: i32,
}

impl StudentStore for PgConnection {
    async fn list(
        &mut self,
        sort: StudentSort,
        search: Option<&str>,
    ) -> RegistrarResult<Vec<Student>> {
        let order = match sort {
            StudentSort::NameAsc => "last_name ASC",
            //date_desc orders by surname as well, matching the site it replaces
            StudentSort::NameDesc | StudentSort::DateDesc => "last_name DESC",
            StudentSort::DateAsc => "enrollment_date ASC",
        };

        let search = search.filter(|needle| !needle.is_empty());
        let query = match search {
            //strpos rather than LIKE, so the needle is a literal substring
            Some(_) => format!(
                "SELECT {STUDENT_COLUMNS} FROM students \
                 WHERE strpos(last_name, $1) > 0 OR strpos(first_mid_name, $1) > 0 \
                 ORDER BY {order}"
            ),
            None => format!("SELECT {STUDENT_COLUMNS} FROM students ORDER BY {order}"),
        };

        let mut query_as = sqlx::query_as::<_, Student>(&query);
        if let Some(needle) = search {
            query_as = query_as.bind(needle.to_owned());
        }

        query_as
            .fetch_all(&mut *self)
            .await
            .context(MakeQuerySnafu)
    }

    async fn get(&mut self, id: i32) -> RegistrarResult<Option<Student>> {
        let query = format!("SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(&mut *self)
            .await
            .context(MakeQuerySnafu)
    }

    async fn get_detail(&mut self, id: i32) -> RegistrarResult<Option<StudentDetail>> {
        let Some(student) = self.get(id).await? else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, EnrollmentRow>(
            "SELECT e.id, e.grade, c.id AS course_id, c.title, c.credits \
             FROM enrollments e \
             JOIN courses c ON c.id = e.course_id \
             WHERE e.student_id = $1 \
             ORDER BY c.title",
        )
        .bind(id)
        .fetch_all(&mut *self)
        .await
        .context(MakeQuerySnafu)?;

        let enrollments = rows
            .into_iter()
            .map(|row| Enrollment {
                id: row.id,
                grade: row.grade,
                course: Course {
                    id: row.course_id,
                    title: row.title,
                    credits: row.credits,
                },
            })
            .collect();

        Ok(Some(StudentDetail {
            student,
            enrollments,
        }))
    }

    async fn insert(&mut self, new: &NewStudent) -> WriteResult<i32> {
        let row: (i32,) = sqlx::query_as(
            "INSERT INTO students (last_name, first_mid_name, enrollment_date) \
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&new.last_name)
        .bind(&new.first_mid_name)
        .bind(new.enrollment_date)
        .fetch_one(&mut *self)
        .await
        .context(DatabaseSnafu)?;
        Ok(row.0)
    }

    async fn update(&mut self, student: &Student) -> WriteResult<()> {
        sqlx::query(
            "UPDATE students SET last_name = $2, first_mid_name = $3, enrollment_date = $4 \
             WHERE id = $1",
        )
        .bind(student.id)
        .bind(&student.last_name)
        .bind(&student.first_mid_name)
        .bind(student.enrollment_date)
        .execute(&mut *self)
        .await
        .context(DatabaseSnafu)?;
        Ok(())
    }

    async fn remove(&mut self, id: i32) -> WriteResult<()> {
        sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&mut *self)
            .await
            .context(DatabaseSnafu)?;
        Ok(())
    }
}

#[cfg(test)]
pub mod memory {
    use super::*;
    use chrono::NaiveDate;

    /// In-memory stand-in for the Postgres store, with a switch to make
    /// writes fail so the failure branches can be exercised.
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        students: Vec<Student>,
        enrollments: Vec<(i32, Enrollment)>,
        next_id: i32,
        pub fail_writes: bool,
    }

    impl MemoryStore {
        pub fn with_students<'a>(
            rows: impl IntoIterator<Item = (i32, &'a str, &'a str, &'a str)>,
        ) -> Self {
            let students: Vec<Student> = rows
                .into_iter()
                .map(|(id, last_name, first_mid_name, enrollment_date)| Student {
                    id,
                    last_name: last_name.to_owned(),
                    first_mid_name: first_mid_name.to_owned(),
                    enrollment_date: NaiveDate::parse_from_str(enrollment_date, "%Y-%m-%d")
                        .unwrap(),
                })
                .collect();
            let next_id = students.iter().map(|student| student.id).max().unwrap_or(0);

            Self {
                students,
                enrollments: Vec::new(),
                next_id,
                fail_writes: false,
            }
        }

        pub fn push_enrollment(
            &mut self,
            student_id: i32,
            course: Course,
            grade: Option<&str>,
        ) {
            let id = self.enrollments.len() as i32 + 1;
            self.enrollments.push((
                student_id,
                Enrollment {
                    id,
                    course,
                    grade: grade.map(str::to_owned),
                },
            ));
        }

        pub fn len(&self) -> usize {
            self.students.len()
        }

        pub fn is_empty(&self) -> bool {
            self.students.is_empty()
        }
    }

    impl StudentStore for MemoryStore {
        async fn list(
            &mut self,
            sort: StudentSort,
            search: Option<&str>,
        ) -> RegistrarResult<Vec<Student>> {
            let mut students: Vec<Student> = self
                .students
                .iter()
                .filter(|student| match search {
                    Some(needle) if !needle.is_empty() => {
                        student.last_name.contains(needle)
                            || student.first_mid_name.contains(needle)
                    }
                    _ => true,
                })
                .cloned()
                .collect();

            match sort {
                StudentSort::NameAsc => {
                    students.sort_by(|a, b| a.last_name.cmp(&b.last_name));
                }
                StudentSort::NameDesc | StudentSort::DateDesc => {
                    students.sort_by(|a, b| b.last_name.cmp(&a.last_name));
                }
                StudentSort::DateAsc => {
                    students.sort_by(|a, b| a.enrollment_date.cmp(&b.enrollment_date));
                }
            }

            Ok(students)
        }

        async fn get(&mut self, id: i32) -> RegistrarResult<Option<Student>> {
            Ok(self
                .students
                .iter()
                .find(|student| student.id == id)
                .cloned())
        }

        async fn get_detail(&mut self, id: i32) -> RegistrarResult<Option<StudentDetail>> {
            let Some(student) = self.get(id).await? else {
                return Ok(None);
            };

            let enrollments = self
                .enrollments
                .iter()
                .filter(|(student_id, _)| *student_id == id)
                .map(|(_, enrollment)| enrollment.clone())
                .collect();

            Ok(Some(StudentDetail {
                student,
                enrollments,
            }))
        }

        async fn insert(&mut self, new: &NewStudent) -> WriteResult<i32> {
            if self.fail_writes {
                return RejectedSnafu.fail();
            }

            self.next_id += 1;
            self.students.push(Student {
                id: self.next_id,
                last_name: new.last_name.clone(),
                first_mid_name: new.first_mid_name.clone(),
                enrollment_date: new.enrollment_date,
            });
            Ok(self.next_id)
        }

        async fn update(&mut self, student: &Student) -> WriteResult<()> {
            if self.fail_writes {
                return RejectedSnafu.fail();
            }

            if let Some(existing) = self
                .students
                .iter_mut()
                .find(|existing| existing.id == student.id)
            {
                *existing = student.clone();
            }
            Ok(())
        }

        async fn remove(&mut self, id: i32) -> WriteResult<()> {
            if self.fail_writes {
                return RejectedSnafu.fail();
            }

            self.students.retain(|student| student.id != id);
            self.enrollments.retain(|(student_id, _)| *student_id != id);
            Ok(())
        }
    }
}
