pub mod relay_query_line;

pub use relay_query_line::RelayQueryLineUseCase;
