mod facade_tests;
mod params_tests;
