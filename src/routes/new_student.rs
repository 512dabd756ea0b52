use crate::{
    data::student::StudentForm,
    error::RegistrarResult,
    maud_conveniences::{error_banner, simple_form_element, title},
    records::{self, CreateOutcome},
    state::RegistrarState,
};
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};

/// The create/edit form body, shared with the edit page. Values come back
/// pre-filled when a submission is being redisplayed.
pub fn student_form(
    action: &str,
    last_name: &str,
    first_mid_name: &str,
    enrollment_date: &str,
    errors: &[String],
) -> Markup {
    html! {
        div class="bg-gray-800 p-8 rounded shadow-md max-w-md w-full" {
            (error_banner(errors))

            form method="post" action=(action) class="p-4" {
                (simple_form_element("last_name", "Last Name", true, None, Some(last_name)))
                (simple_form_element("first_mid_name", "First Mid Name", true, None, Some(first_mid_name)))
                (simple_form_element("enrollment_date", "Enrollment Date", true, Some("date"), Some(enrollment_date)))

                div class="flex items-center justify-between" {
                    button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                        "Save"
                    }
                    a href="/students" class="text-gray-300 hover:text-white" {"Back to List"}
                }
            }
        }
    }
}

pub async fn get_new_student_form(State(state): State<RegistrarState>) -> Markup {
    state.render(html! {
        (title("Create Student"))
        (student_form("/students/create", "", "", "", &[]))
    })
}

pub async fn post_new_student(
    State(state): State<RegistrarState>,
    Form(form): Form<StudentForm>,
) -> RegistrarResult<Response> {
    let mut conn = state.get_connection().await?;

    match records::create(&mut *conn, form).await? {
        CreateOutcome::Created { id } => {
            info!(id, "added new student");
            Ok(Redirect::to("/students").into_response())
        }
        CreateOutcome::Invalid { form, errors } => Ok(state
            .render(html! {
                (title("Create Student"))
                (student_form("/students/create", &form.last_name, &form.first_mid_name, &form.enrollment_date, &errors))
            })
            .into_response()),
    }
}
