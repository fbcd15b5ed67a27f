//! Property service module: listings, likes, search and the homescreen feed

mod service;


pub use service::PropertyService;
