pub mod matcher_contract;
