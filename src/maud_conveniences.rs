use maud::{Markup, Render, html};

pub fn render_nav() -> Markup {
    html! {
        nav class="w-full bg-gray-800 p-4 mb-8" {
            div class="container mx-auto flex flex-row space-x-4" {
                a href="/" class="font-bold hover:text-gray-300" {"Registrar"}
                a href="/students" class="hover:text-gray-300" {"Students"}
            }
        }
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn error_banner(messages: &[String]) -> Markup {
    html! {
        @if !messages.is_empty() {
            div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                @for message in messages {
                    p {(message)}
                }
            }
        }
    }
}

pub fn form_element(id: &'static str, label: &'static str, contents: Markup) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-gray-300 text-sm font-bold mb-2" {(label)}
            (contents)
        }
    }
}

pub fn simple_form_element(
    id: &'static str,
    label: &'static str,
    required: bool,
    input_type: Option<&'static str>,
    value: Option<&str>,
) -> Markup {
    form_element(id, label, html! {
        input type=(input_type.unwrap_or("text")) id=(id) name=(id) required[required] value=[value] class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600";
    })
}
