mod file_reader_tests;
mod type_filter_tests;
mod utils;
