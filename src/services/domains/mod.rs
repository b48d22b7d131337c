pub mod hotel;
pub mod itinerary;
pub mod restaurant;
pub mod transportation;

pub use hotel::HotelDomain;
pub use itinerary::ItineraryDomain;
pub use restaurant::RestaurantDomain;
pub use transportation::TransportationDomain;
