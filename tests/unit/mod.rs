mod individual_tests;

mod functions_test;
mod set_tests;



mod dataset_tests;
