use db::models::invoice::InvoiceStatus;
use serde::Serialize;
use uuid::Uuid;

/// One display row of the paginated invoice table. Amount and date are
/// pre-formatted for presentation; the window total never appears here.
#[derive(Debug, Serialize)]
pub struct InvoicesTableRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub date: String,
    pub amount: String,
    pub status: InvoiceStatus,
}

#[derive(Debug, Serialize)]
pub struct InvoicesPage {
    pub items: Vec<InvoicesTableRow>,
    pub total_pages: i64,
}

/// Invoice shaped for form editing: amount converted from cents to major
/// units at read time.
#[derive(Debug, Serialize)]
pub struct InvoiceForm {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: f64,
    pub status: InvoiceStatus,
}

#[derive(Debug, Serialize)]
pub struct LatestInvoice {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub email: String,
    pub amount: String,
}
