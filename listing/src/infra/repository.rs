pub mod hotel;
pub mod room;

pub use hotel::PgHotelRepository;
pub use room::PgRoomRepository;
