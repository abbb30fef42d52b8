pub mod u501_submit_contact;
