//! Banner event create/edit form.

mod view;
mod view_model;

pub use view::BannerEventDetails;
pub use view_model::BannerEventDetailsViewModel;
