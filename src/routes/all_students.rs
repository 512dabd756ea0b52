use crate::{
    error::RegistrarResult,
    maud_conveniences::title,
    records::{self, StudentIndex},
    state::RegistrarState,
};
use axum::extract::{Query, State};
use maud::{Markup, html};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct StudentsQuery {
    pub sort_order: Option<String>,
    pub search_string: Option<String>,
}

pub async fn get_students(
    State(state): State<RegistrarState>,
    Query(StudentsQuery {
        sort_order,
        search_string,
    }): Query<StudentsQuery>,
) -> RegistrarResult<Markup> {
    let mut conn = state.get_connection().await?;
    let StudentIndex {
        students,
        name_sort_param,
        date_sort_param,
        current_filter,
    } = records::list(&mut *conn, sort_order.as_deref(), search_string.as_deref()).await?;

    let filter_value = current_filter.unwrap_or_default();

    Ok(state.render(html! {
        div class="container mx-auto px-4" {
            (title("Students"))

            div class="flex flex-row items-center justify-between mb-4" {
                form method="get" action="/students" class="flex flex-row items-center space-x-2" {
                    input type="text" name="search_string" value=(filter_value) placeholder="Find by name" class="shadow appearance-none border rounded py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600";
                    button type="submit" class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" {"Search"}
                    a href="/students" class="py-2 px-4 text-gray-300 hover:text-white" {"Back to Full List"}
                }
                a href="/students/create" class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" {"Create New"}
            }

            div class="overflow-x-auto" {
                table class="min-w-full bg-gray-800 rounded shadow-md" {
                    thead class="bg-gray-700" {
                        tr {
                            th class="py-2 px-4 text-left font-semibold text-gray-300" {
                                a href={"/students?sort_order=" (name_sort_param) "&search_string=" (filter_value)} class="hover:text-white underline" {"Last Name"}
                            }
                            th class="py-2 px-4 text-left font-semibold text-gray-300" {"First Mid Name"}
                            th class="py-2 px-4 text-left font-semibold text-gray-300" {
                                a href={"/students?sort_order=" (date_sort_param) "&search_string=" (filter_value)} class="hover:text-white underline" {"Enrollment Date"}
                            }
                            th class="py-2 px-4" {}
                        }
                    }
                    tbody {
                        @for student in &students {
                            tr {
                                td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(student.last_name)}
                                td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(student.first_mid_name)}
                                td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(student.enrollment_date.format("%d %B %Y"))}
                                td class="py-2 px-4 border-b border-gray-600 space-x-2" {
                                    a href={"/students/edit/" (student.id)} class="text-blue-400 hover:text-blue-200" {"Edit"}
                                    a href={"/students/details/" (student.id)} class="text-blue-400 hover:text-blue-200" {"Details"}
                                    a href={"/students/delete/" (student.id)} class="text-red-400 hover:text-red-200" {"Delete"}
                                }
                            }
                        }
                    }
                }
            }
        }
    }))
}
