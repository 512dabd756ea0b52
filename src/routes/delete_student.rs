use crate::{
    error::{MissingStudentSnafu, RegistrarResult},
    maud_conveniences::{error_banner, title},
    records::{self, DeleteOutcome},
    state::RegistrarState,
};
use axum::{
    extract::{Path, Query, State},
    response::Redirect,
};
use maud::{Markup, html};
use serde::Deserialize;
use snafu::OptionExt;

#[derive(Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub save_changes_error: bool,
}

pub async fn get_delete_student(
    State(state): State<RegistrarState>,
    Path(id): Path<i32>,
    Query(DeleteQuery { save_changes_error }): Query<DeleteQuery>,
) -> RegistrarResult<Markup> {
    let mut conn = state.get_connection().await?;
    let (student, banner) = records::for_delete(&mut *conn, id, save_changes_error)
        .await?
        .context(MissingStudentSnafu { id })?;

    let banner = banner.map(|message| vec![message.to_owned()]).unwrap_or_default();

    Ok(state.render(html! {
        div class="bg-gray-800 p-8 rounded shadow-md max-w-md w-full" {
            (title("Delete Student"))
            (error_banner(&banner))

            p class="text-gray-300 mb-4" {"Are you sure you want to delete this?"}

            div class="mb-6" {
                p class="text-gray-200" {
                    span class="font-semibold" {"Last Name: "} (student.last_name)
                }
                p class="text-gray-200" {
                    span class="font-semibold" {"First Mid Name: "} (student.first_mid_name)
                }
                p class="text-gray-200" {
                    span class="font-semibold" {"Enrollment Date: "} (student.enrollment_date.format("%d %B %Y"))
                }
            }

            form method="post" action={"/students/delete/" (id)} class="flex items-center justify-between" {
                button type="submit" class="bg-red-600 hover:bg-red-800 font-bold py-2 px-4 rounded" {
                    "Delete"
                }
                a href="/students" class="text-gray-300 hover:text-white" {"Back to List"}
            }
        }
    }))
}

pub async fn post_delete_student(
    State(state): State<RegistrarState>,
    Path(id): Path<i32>,
) -> RegistrarResult<Redirect> {
    let mut conn = state.get_connection().await?;

    match records::confirm_delete(&mut *conn, id).await? {
        DeleteOutcome::Deleted | DeleteOutcome::Missing => Ok(Redirect::to("/students")),
        DeleteOutcome::Failed => Ok(Redirect::to(&format!(
            "/students/delete/{id}?save_changes_error=true"
        ))),
    }
}
