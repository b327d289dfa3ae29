pub mod u501_pos_sale;
