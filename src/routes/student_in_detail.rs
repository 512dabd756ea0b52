use crate::{
    error::{MissingStudentSnafu, RegistrarResult},
    maud_conveniences::title,
    records,
    state::RegistrarState,
};
use axum::extract::{Path, State};
use maud::{Markup, html};
use snafu::OptionExt;

pub async fn get_student(
    State(state): State<RegistrarState>,
    Path(id): Path<i32>,
) -> RegistrarResult<Markup> {
    let mut conn = state.get_connection().await?;
    let detail = records::detail(&mut *conn, id)
        .await?
        .context(MissingStudentSnafu { id })?;

    Ok(state.render(html! {
        div class="container mx-auto px-4 py-8" {
            div class="bg-gray-800 p-6 md:p-8 rounded-lg shadow-xl" {
                (title("Details"))

                div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8" {
                    div {
                        p class="text-gray-300 text-sm" {"Last Name:"}
                        p class="text-gray-100 text-lg" {(detail.student.last_name)}
                    }
                    div {
                        p class="text-gray-300 text-sm" {"First Mid Name:"}
                        p class="text-gray-100 text-lg" {(detail.student.first_mid_name)}
                    }
                    div {
                        p class="text-gray-300 text-sm" {"Enrollment Date:"}
                        p class="text-gray-100 text-lg" {(detail.student.enrollment_date.format("%d %B %Y"))}
                    }
                }

                div class="mb-8" {
                    p class="text-gray-300 text-sm mb-2" {"Enrollments:"}
                    @if detail.enrollments.is_empty() {
                        p class="text-gray-500 italic" {"Not enrolled on any courses."}
                    } @else {
                        table class="min-w-full bg-gray-700 rounded" {
                            thead {
                                tr {
                                    th class="py-2 px-4 text-left font-semibold text-gray-300" {"Course Title"}
                                    th class="py-2 px-4 text-left font-semibold text-gray-300" {"Credits"}
                                    th class="py-2 px-4 text-left font-semibold text-gray-300" {"Grade"}
                                }
                            }
                            tbody {
                                @for enrollment in &detail.enrollments {
                                    tr {
                                        td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(enrollment.course.title)}
                                        td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(enrollment.course.credits)}
                                        td class="py-2 px-4 border-b border-gray-600 text-gray-200" {
                                            @if let Some(grade) = &enrollment.grade {
                                                (grade)
                                            } @else {
                                                span class="text-gray-500 italic" {"No grade"}
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div class="flex flex-row space-x-4" {
                    a href={"/students/edit/" (detail.student.id)} class="text-blue-400 hover:text-blue-200" {"Edit"}
                    a href="/students" class="text-gray-300 hover:text-white" {"Back to List"}
                }
            }
        }
    }))
}
