mod admin_email;

pub use admin_email::AdminEmail;
