pub mod relay;

pub use relay::RelayQueryLineUseCase;
