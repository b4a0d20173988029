//! Request classification and "not found" answers.

mod allow_list;
mod service;

#[cfg(test)]
mod service_props;

pub use allow_list::AllowList;
pub use service::DispatchFilterService;
