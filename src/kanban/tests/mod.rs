//! Unit tests for the kanban context.


use crate::kanban::{
    codec::{TaskColumnPolicy, decode_board},
    domain::Kanban,
};

const SAMPLE_PLAN: &str = concat!(
    r#"{"columns":[{"id":"todo","title":"Todo"},{"id":"doing","title":"Work in progress"},"#,
    r#"{"id":"done","title":"Done"}],"tasks":["#,
    r#"{"id":"1","columnId":"todo","content":"Book MRI"},"#,
    r#"{"id":"2","columnId":"doing","content":"Chemotherapy cycle"},"#,
    r#"{"id":"3","columnId":"todo","content":"Nutrition consult"},"#,
    r#"{"id":"4","columnId":"done","content":"Biopsy"},"#,
    r#"{"id":"5","columnId":"overdue","content":"Blood panel"}]}"#
);

fn sample_board() -> Result<Kanban, eyre::Report> {
    Ok(decode_board(SAMPLE_PLAN, TaskColumnPolicy::AllowOverdue)?)
}
