use super::actions::Action;
use crate::analysis::SentimentClient;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

impl BackgroundTask {
    pub fn elapsed(&self) -> std::time::Duration {
        self.started_at.elapsed()
    }
}

/// Runs network work off the UI loop and reports back through an action channel.
///
/// Results arrive in completion order. Nothing here deduplicates or cancels
/// overlapping requests.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn one analysis request for `text`
    pub fn spawn_analysis(&mut self, client: Arc<dyn SentimentClient>, text: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let description = format!("Analyze {} chars via {}", text.chars().count(), client.endpoint());

        let handle = tokio::spawn(async move {
            let action = match client.analyze(&text).await {
                Ok(results) => Action::AnalysisSucceeded {
                    request_id: task_id,
                    results,
                },
                Err(error) => Action::AnalysisFailed {
                    request_id: task_id,
                    error,
                },
            };
            // The receiver is gone only when the app is shutting down
            let _ = action_sender.send(action);
        });

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Remove finished tasks, returning them for logging
    pub fn cleanup_finished_tasks(&mut self) -> Vec<BackgroundTask> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        finished.into_iter().filter_map(|task_id| self.tasks.remove(&task_id)).collect()
    }

    /// Abort every request still in flight; none of them will report back
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Requests spawned and not yet cleaned up
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all_tasks();
    }
}
