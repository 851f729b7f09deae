//! Role and row-level access rules.
//!
//! | action                 | employee            | core                 |
//! |------------------------|---------------------|----------------------|
//! | register user          | no                  | yes                  |
//! | create task            | no                  | yes                  |
//! | update task            | own (assignee) only | any                  |
//! | create report          | yes, as self        | no                   |
//! | create salary          | no                  | yes                  |
//! | create / list finance  | no                  | yes                  |
//! | list tasks/reports/pay | forced to self      | optional filter      |

use crate::errors::{AppError, AppResult};
use crate::models::{AuthUser, Role, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RegisterUser,
    CreateTask,
    CreateReport,
    CreateSalary,
    CreateFinance,
    ListFinance,
}

impl Action {
    fn allowed_role(self) -> Role {
        match self {
            Action::CreateReport => Role::Employee,
            Action::RegisterUser
            | Action::CreateTask
            | Action::CreateSalary
            | Action::CreateFinance
            | Action::ListFinance => Role::Core,
        }
    }

    fn denial(self) -> &'static str {
        match self {
            Action::RegisterUser => "Only core can create users",
            Action::CreateTask => "Only core can create tasks",
            Action::CreateReport => "Only employees can submit reports",
            Action::CreateSalary => "Only core can create salary records",
            Action::CreateFinance => "Only core can add finance records",
            Action::ListFinance => "Only core can view finance records",
        }
    }
}

pub fn require(user: &AuthUser, action: Action) -> AppResult<()> {
    if user.role == action.allowed_role() {
        return Ok(());
    }
    tracing::warn!("Denied {:?} for {} ({:?})", action, user.email, user.role);
    Err(AppError::Forbidden(action.denial().to_string()))
}

/// Owner email a listing is restricted to, if any.
///
/// Employees always see only their own rows; core sees everything unless it
/// asks for one owner.
pub fn owner_scope(user: &AuthUser, requested: Option<String>) -> Option<String> {
    if user.is_core() {
        requested
    } else {
        Some(user.email.clone())
    }
}

pub fn can_modify_task(user: &AuthUser, task: &Task) -> bool {
    user.is_core() || task.assignee_email == user.email
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::models::TaskStatus;

    fn user(email: &str, role: Role) -> AuthUser {
        AuthUser {
            email: email.to_string(),
            role,
            name: "Test".to_string(),
        }
    }

    fn task_for(assignee: &str) -> Task {
        let now = Utc::now();
        Task {
            id: "t".into(),
            title: "t".into(),
            description: None,
            assignee_email: assignee.into(),
            status: TaskStatus::Pending,
            due_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn core_only_actions_reject_employees() {
        let employee = user("b@corp.io", Role::Employee);
        let core = user("a@corp.io", Role::Core);
        for action in [
            Action::RegisterUser,
            Action::CreateTask,
            Action::CreateSalary,
            Action::CreateFinance,
            Action::ListFinance,
        ] {
            assert!(matches!(require(&employee, action), Err(AppError::Forbidden(_))));
            assert!(require(&core, action).is_ok());
        }
    }

    #[test]
    fn reports_are_employee_only() {
        assert!(require(&user("b@corp.io", Role::Employee), Action::CreateReport).is_ok());
        assert!(require(&user("a@corp.io", Role::Core), Action::CreateReport).is_err());
    }

    #[test]
    fn employees_are_scoped_to_themselves() {
        let employee = user("b@corp.io", Role::Employee);
        assert_eq!(
            owner_scope(&employee, Some("c@corp.io".into())).as_deref(),
            Some("b@corp.io")
        );
        assert_eq!(owner_scope(&employee, None).as_deref(), Some("b@corp.io"));

        let core = user("a@corp.io", Role::Core);
        assert_eq!(owner_scope(&core, None), None);
        assert_eq!(owner_scope(&core, Some("c@corp.io".into())).as_deref(), Some("c@corp.io"));
    }

    #[test]
    fn only_assignee_or_core_may_modify_a_task() {
        let task = task_for("b@corp.io");
        assert!(can_modify_task(&user("b@corp.io", Role::Employee), &task));
        assert!(can_modify_task(&user("a@corp.io", Role::Core), &task));
        assert!(!can_modify_task(&user("c@corp.io", Role::Employee), &task));
    }
}
