mod adapters;
mod database;
mod quick_search;
