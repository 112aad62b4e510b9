// Diesel table definitions for the orders database.
//
// The orders table uses quoted mixed-case column names; `sql_name` keeps the
// exact identifiers while the Rust side stays snake_case.

diesel::table! {
    order_statuses (id) {
        id -> Int4,
        name -> Text,
    }
}

diesel::table! {
    orders (id) {
        id -> Int4,
        #[sql_name = "userId"]
        user_id -> Int4,
        #[sql_name = "totalAmount"]
        total_amount -> Numeric,
        #[sql_name = "statusId"]
        status_id -> Int4,
        #[sql_name = "createdAt"]
        created_at -> Timestamp,
        #[sql_name = "updatedAt"]
        updated_at -> Timestamp,
    }
}

diesel::joinable!(orders -> order_statuses (status_id));

diesel::allow_tables_to_appear_in_same_query!(order_statuses, orders,);
