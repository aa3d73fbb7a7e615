pub mod raffle_api;

pub use raffle_api::RaffleApiClient;
