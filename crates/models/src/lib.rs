pub mod db;
pub mod customer;
pub mod vehicle;
pub mod service_record;

#[cfg(test)]
mod tests;
