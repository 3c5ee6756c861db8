mod view;

pub use view::UserDetails;
