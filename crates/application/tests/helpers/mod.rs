#![allow(dead_code)]

pub mod mock_publisher;

pub use mock_publisher::MockEventPublisher;
