mod gstr1_service;

pub use gstr1_service::Gstr1Service;
