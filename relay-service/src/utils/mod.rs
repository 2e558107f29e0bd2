pub mod request_body;

pub use request_body::RelayJson;
