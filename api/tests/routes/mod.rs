mod events_test;
mod health_test;
mod scan_test;
mod students_test;
