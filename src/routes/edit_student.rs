use crate::{
    data::student::StudentForm,
    error::{MissingStudentSnafu, RegistrarResult},
    maud_conveniences::title,
    records::{self, EditOutcome},
    routes::new_student::student_form,
    state::RegistrarState,
};
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};
use snafu::OptionExt;

pub async fn get_edit_student(
    State(state): State<RegistrarState>,
    Path(id): Path<i32>,
) -> RegistrarResult<Markup> {
    let mut conn = state.get_connection().await?;
    let student = records::for_edit(&mut *conn, id)
        .await?
        .context(MissingStudentSnafu { id })?;

    Ok(state.render(html! {
        (title("Edit Student"))
        (student_form(
            &format!("/students/edit/{id}"),
            &student.last_name,
            &student.first_mid_name,
            &student.enrollment_date.format("%Y-%m-%d").to_string(),
            &[],
        ))
    }))
}

pub async fn post_edit_student(
    State(state): State<RegistrarState>,
    Path(id): Path<i32>,
    Form(form): Form<StudentForm>,
) -> RegistrarResult<Response> {
    let mut conn = state.get_connection().await?;

    match records::edit(&mut *conn, id, form).await? {
        EditOutcome::Updated => Ok(Redirect::to("/students").into_response()),
        EditOutcome::Invalid { student, errors } => Ok(state
            .render(html! {
                (title("Edit Student"))
                (student_form(
                    &format!("/students/edit/{id}"),
                    &student.last_name,
                    &student.first_mid_name,
                    &student.enrollment_date.format("%Y-%m-%d").to_string(),
                    &errors,
                ))
            })
            .into_response()),
        EditOutcome::NotFound => MissingStudentSnafu { id }.fail(),
    }
}
