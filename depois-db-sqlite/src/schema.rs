table! {
    account (account_id) {
        account_id -> Text,
        name -> Text,
        email -> Text,
        cpf -> Text,
        car_plate -> Nullable<Text>,
        is_passenger -> Bool,
        is_driver -> Bool,
    }
}
