mod view;
mod view_model;

pub use view::StoreDetails;
pub use view_model::StoreDetailsViewModel;
