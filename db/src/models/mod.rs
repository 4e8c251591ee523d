pub mod attendance_record;
pub mod event;
pub mod student;

pub use attendance_record::Entity as AttendanceRecord;
pub use event::Entity as Event;
pub use student::Entity as Student;
