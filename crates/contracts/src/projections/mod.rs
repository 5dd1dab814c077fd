pub mod p900_monthly_sales;
