pub mod all_students;
pub mod delete_student;
pub mod edit_student;
pub mod index;
pub mod new_student;
pub mod student_in_detail;
