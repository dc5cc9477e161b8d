#![no_std]

pub mod contract;
mod events;
mod storage;

pub use contract::TitleRegistryContract;
