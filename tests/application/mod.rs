mod intake_test;
mod lazy_converter_test;
mod projection_test;
