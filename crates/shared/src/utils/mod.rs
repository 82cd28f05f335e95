mod gracefullshutdown;
mod logs;
mod metrics;
mod money;
mod period;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status};
pub use self::money::{cents_to_amount, amount_to_cents};
pub use self::period::{DateRange, Period, day_end, day_start};
