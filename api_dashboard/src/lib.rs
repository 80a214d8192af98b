use actix_web::web;

pub mod routes {
    pub mod customer;
    pub mod invoice;
    pub mod overview;
}
mod services {
    pub(crate) mod customer;
    pub(crate) mod invoice;
    pub(crate) mod overview;
}
mod dtos {
    pub(crate) mod customer;
    pub(crate) mod invoice;
    pub(crate) mod overview;
}

pub fn mount_dashboard() -> actix_web::Scope {
    web::scope("/dashboard")
        .service(routes::overview::get_cards)
        .service(routes::overview::get_revenue)
        .service(routes::overview::get_latest_invoices)
        .service(routes::invoice::get_invoices)
        .service(routes::invoice::get_invoice)
        .service(routes::customer::get_customer_fields)
        .service(routes::customer::get_customers)
}
