pub(crate) mod listing_cards;
pub(crate) mod notice;
pub(crate) mod place_info;
pub(crate) mod review_cards;
