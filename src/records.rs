//! The student record operations themselves, kept free of axum so they can
//! be driven by the routes or by a test harness against any [`StudentStore`].

use crate::{
    data::student::{Student, StudentDetail, StudentForm, StudentSort},
    error::RegistrarResult,
    store::StudentStore,
};

pub const CREATE_FAILED_MESSAGE: &str = "Unable to save changes, contact Bob for support.";
pub const EDIT_FAILED_MESSAGE: &str = "Error occurred please kill your dog.";
pub const DELETE_FAILED_MESSAGE: &str = "Delete Failed contact Bob";

/// Everything the list page needs: the rows plus the sort parameters the two
/// sortable column headers should link to next, plus the echoed filter.
#[derive(Debug)]
pub struct StudentIndex {
    pub students: Vec<Student>,
    pub name_sort_param: &'static str,
    pub date_sort_param: &'static str,
    pub current_filter: Option<String>,
}

#[derive(Debug)]
pub enum CreateOutcome {
    Created { id: i32 },
    Invalid { form: StudentForm, errors: Vec<String> },
}

#[derive(Debug)]
pub enum EditOutcome {
    Updated,
    Invalid {
        student: Student,
        errors: Vec<String>,
    },
    NotFound,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed,
    Missing,
}

pub async fn list(
    store: &mut impl StudentStore,
    sort_param: Option<&str>,
    search: Option<&str>,
) -> RegistrarResult<StudentIndex> {
    let name_sort_param = match sort_param {
        None | Some("") => "name_desc",
        Some(_) => "",
    };
    let date_sort_param = if sort_param == Some("Date") {
        "date_desc"
    } else {
        "Date"
    };

    let students = store
        .list(StudentSort::from_param(sort_param), search)
        .await?;

    Ok(StudentIndex {
        students,
        name_sort_param,
        date_sort_param,
        current_filter: search
            .filter(|needle| !needle.is_empty())
            .map(str::to_owned),
    })
}

pub async fn detail(
    store: &mut impl StudentStore,
    id: i32,
) -> RegistrarResult<Option<StudentDetail>> {
    store.get_detail(id).await
}

pub async fn create(
    store: &mut impl StudentStore,
    form: StudentForm,
) -> RegistrarResult<CreateOutcome> {
    let new = match form.validate() {
        Ok(new) => new,
        Err(errors) => return Ok(CreateOutcome::Invalid { form, errors }),
    };

    match store.insert(&new).await {
        Ok(id) => Ok(CreateOutcome::Created { id }),
        Err(e) => {
            warn!(%e, "unable to insert student");
            Ok(CreateOutcome::Invalid {
                form,
                errors: vec![CREATE_FAILED_MESSAGE.to_owned()],
            })
        }
    }
}

pub async fn for_edit(store: &mut impl StudentStore, id: i32) -> RegistrarResult<Option<Student>> {
    store.get(id).await
}

pub async fn edit(
    store: &mut impl StudentStore,
    id: i32,
    form: StudentForm,
) -> RegistrarResult<EditOutcome> {
    let Some(mut student) = store.get(id).await? else {
        return Ok(EditOutcome::NotFound);
    };

    let new = match form.validate() {
        Ok(new) => new,
        Err(errors) => return Ok(EditOutcome::Invalid { student, errors }),
    };

    //only the three caller-writable fields land on the row; the id stays put
    student.last_name = new.last_name;
    student.first_mid_name = new.first_mid_name;
    student.enrollment_date = new.enrollment_date;

    match store.update(&student).await {
        Ok(()) => Ok(EditOutcome::Updated),
        Err(e) => {
            warn!(%e, id, "unable to update student");
            Ok(EditOutcome::Invalid {
                student,
                errors: vec![EDIT_FAILED_MESSAGE.to_owned()],
            })
        }
    }
}

pub async fn for_delete(
    store: &mut impl StudentStore,
    id: i32,
    save_changes_error: bool,
) -> RegistrarResult<Option<(Student, Option<&'static str>)>> {
    Ok(store
        .get(id)
        .await?
        .map(|student| (student, save_changes_error.then_some(DELETE_FAILED_MESSAGE))))
}

pub async fn confirm_delete(
    store: &mut impl StudentStore,
    id: i32,
) -> RegistrarResult<DeleteOutcome> {
    //a missing row is not reported here, the caller just lands back on the list
    if store.get(id).await?.is_none() {
        return Ok(DeleteOutcome::Missing);
    }

    match store.remove(id).await {
        Ok(()) => Ok(DeleteOutcome::Deleted),
        Err(e) => {
            warn!(%e, id, "unable to delete student");
            Ok(DeleteOutcome::Failed)
        }
    }
}
