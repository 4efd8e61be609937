use crate::client::DataClient;
use crate::error::TaskflowError;
use crate::models::{Task, User};
use crate::stats::CompletionSummary;

/// The signed-in user and the tasks they created.
pub struct ProfileView<'c, C: DataClient> {
    client: &'c C,
    user: User,
    tasks: Vec<Task>,
}

impl<'c, C: DataClient> ProfileView<'c, C> {
    pub fn load(client: &'c C) -> Result<Self, TaskflowError> {
        let user = client.me()?;
        let tasks = client.list_tasks(None)?;
        Ok(Self {
            client,
            user,
            tasks,
        })
    }

    pub fn refresh(&mut self) -> Result<(), TaskflowError> {
        let user = self.client.me()?;
        let tasks = self.client.list_tasks(None)?;
        self.user = user;
        self.tasks = tasks;
        Ok(())
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(move |t| t.created_by == self.user.email)
    }

    pub fn summary(&self) -> CompletionSummary {
        CompletionSummary::compute(self.user_tasks())
    }

    pub fn logout(self) -> Result<(), TaskflowError> {
        self.client.logout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SqliteClient;
    use crate::error::ErrorCode;
    use crate::models::{NewTask, TaskStatus, UserRole};

    fn client() -> SqliteClient {
        let client = SqliteClient::in_memory().unwrap();
        client
            .register_user("ana@example.com", "Ana", UserRole::Admin)
            .unwrap();
        client
            .register_user("bo@example.com", "Bo", UserRole::User)
            .unwrap();
        client
    }

    fn add(client: &SqliteClient, title: &str, status: TaskStatus) {
        client
            .create_task(NewTask {
                status,
                ..NewTask::new(title)
            })
            .unwrap();
    }

    #[test]
    fn summary_counts_only_own_tasks() {
        let client = client();
        client.login("bo@example.com").unwrap();
        add(&client, "not mine", TaskStatus::Completed);

        client.login("ana@example.com").unwrap();
        add(&client, "one", TaskStatus::Completed);
        add(&client, "two", TaskStatus::Completed);
        add(&client, "three", TaskStatus::Pending);
        add(&client, "four", TaskStatus::InProgress);

        let profile = ProfileView::load(&client).unwrap();
        assert_eq!(profile.user().role, UserRole::Admin);
        let summary = profile.summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.rate, 50);
    }

    #[test]
    fn no_tasks_means_zero_rate() {
        let client = client();
        client.login("bo@example.com").unwrap();
        let profile = ProfileView::load(&client).unwrap();
        assert_eq!(profile.summary(), CompletionSummary::default());
    }

    #[test]
    fn logout_closes_the_session() {
        let client = client();
        client.login("ana@example.com").unwrap();
        ProfileView::load(&client).unwrap().logout().unwrap();
        let err = ProfileView::load(&client).err().unwrap();
        assert_eq!(err.code, ErrorCode::NotAuthenticated);
    }
}
