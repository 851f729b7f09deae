mod user;
mod forms;
mod task;
mod report;
mod salary;
mod finance;
pub mod validation;

pub use user::{User, AuthUser, Role};
pub use forms::{
    RegisterRequest, LoginRequest, TokenResponse,
    CreateTaskRequest, UpdateTaskRequest, CreateReportRequest,
    CreateSalaryRequest, CreateFinanceRequest, OwnerFilter, AssigneeFilter,
};
pub use task::{Task, TaskStatus};
pub use report::Report;
pub use salary::{SalaryPayment, SalaryStatus};
pub use finance::{FinanceRecord, FinanceKind};
