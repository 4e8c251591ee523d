pub mod m202608200001_create_students;
pub mod m202608200002_create_events;
pub mod m202608200003_create_attendance_records;
