pub mod catalog;
pub mod digest;
pub mod dispatch;
pub mod horoscope;
pub mod moon;
pub mod rituals;
pub mod serve;
pub mod signs;
