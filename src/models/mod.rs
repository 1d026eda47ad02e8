//! Typed XMLAgent entities
//!
//! One struct per response shape. Each declares its fields (with the server
//! aliases it accepts) as [`Field`](crate::schema::Field) constants and
//! implements [`Entity`](crate::schema::Entity).

mod account;
mod billing;
mod support;
mod tariffs;

pub use account::{AgentData, CreditInfo, PayCardResult, UserInfo};
pub use billing::{FeeCharge, Payment, PaymentSystem};
pub use support::{Announcement, SignupForm, Ticket, TicketCreateResult};
pub use tariffs::{AllowedTariff, FreezeData, FreezeResult, TariffVService};

#[cfg(test)]
mod tests;
