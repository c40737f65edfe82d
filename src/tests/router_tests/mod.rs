mod asset_tests;
mod contact_tests;
mod page_tests;
mod property_tests;
