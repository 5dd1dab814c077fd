pub mod p900_monthly_sales;

pub use p900_monthly_sales::ui::MonthlySalesReport;
