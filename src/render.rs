//! Text rendering of the task list.

use crate::task::domain::Task;
use minijinja::{Environment, context};
use thiserror::Error;

/// Template for the task list.
///
/// Each task prints its title, its description text when enrichment
/// succeeded, and its identifier.
pub const TASK_LIST_TEMPLATE: &str = concat!(
    "{% for task in tasks %}",
    "{{ task.title }}{% if task.completed %} (done){% endif %}\n",
    "{% if task.task_description %}  {{ task.task_description }}\n{% endif %}",
    "  TaskID: {{ task.id }}\n",
    "{% else %}No tasks.\n{% endfor %}",
);

/// Errors raised while rendering.
#[derive(Debug, Error)]
#[error("failed to render task list: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// Renders `tasks` with [`TASK_LIST_TEMPLATE`].
///
/// # Errors
///
/// Returns [`RenderError`] when the template fails to evaluate.
pub fn render_task_list(tasks: &[Task]) -> Result<String, RenderError> {
    let environment = Environment::new();
    Ok(environment.render_str(TASK_LIST_TEMPLATE, context! { tasks => tasks })?)
}
