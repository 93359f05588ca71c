//! Comprehensive tests for domain_client

use domain_client::{
    Client, ClientDocument, ClientError, ClientKind, ClientValidator,
};

// ============================================================================
// Client Tests
// ============================================================================

mod client_creation_tests {
    use super::*;

    #[test]
    fn test_individual_document_is_cpf() {
        let client = Client::individual("João Silva", "joao@email.com", "123.456.789-09");

        assert_eq!(client.kind(), ClientKind::Individual);
        assert_eq!(
            client.document(),
            &ClientDocument::Individual { cpf: "123.456.789-09".to_string() }
        );
    }

    #[test]
    fn test_corporate_document_is_cnpj() {
        let client = Client::corporate("Empresa XYZ", "contato@xyz.com", "12.345.678/0001-95");

        assert_eq!(client.kind(), ClientKind::Corporate);
        assert_eq!(client.document_id(), "12.345.678/0001-95");
    }

    #[test]
    fn test_new_with_explicit_document() {
        let document = ClientDocument::Corporate { cnpj: "11.222.333/0001-81".to_string() };
        let client = Client::new("Empresa ABC", "abc@empresa.com", document);

        assert!(client.is_corporate());
        assert_eq!(client.name(), "Empresa ABC");
    }

    #[test]
    fn test_construction_accepts_unvalidated_data() {
        let client = Client::individual("", "", "");

        assert_eq!(client.document_id(), "");
        assert!(client.is_individual());
    }

    #[test]
    fn test_display() {
        let client = Client::individual("Ana", "ana@email.com", "529.982.247-25");
        assert_eq!(client.to_string(), "Ana (529.982.247-25)");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ClientKind::Individual.to_string(), "individual");
        assert_eq!(ClientKind::Corporate.to_string(), "corporate");
    }
}

mod client_identity_tests {
    use super::*;

    #[test]
    fn test_distinct_clients_with_same_fields_are_not_same() {
        let a = Client::corporate("Empresa XYZ", "contato@xyz.com", "12.345.678/0001-95");
        let b = Client::corporate("Empresa XYZ", "contato@xyz.com", "12.345.678/0001-95");

        assert_ne!(a.id(), b.id());
        assert!(!a.is_same(&b));
    }

    #[test]
    fn test_clone_is_same_client() {
        let a = Client::individual("João Silva", "joao@email.com", "123.456.789-09");
        let b = a.clone();

        assert!(a.is_same(&b));
        assert!(b.is_same(&a));
    }

    #[test]
    fn test_serializes_id_and_document() {
        let client = Client::individual("João Silva", "joao@email.com", "123.456.789-09");
        let json: serde_json::Value = serde_json::to_value(&client).unwrap();

        assert_eq!(json["id"], serde_json::to_value(client.id()).unwrap());
        assert_eq!(json["document"]["kind"], "individual");
        assert_eq!(json["name"], "João Silva");
    }

    #[test]
    fn test_client_rebuilt_from_json_fields_is_a_new_client() {
        let client = Client::individual("João Silva", "joao@email.com", "123.456.789-09");
        let json = serde_json::to_value(&client).unwrap();

        let document: ClientDocument = serde_json::from_value(json["document"].clone()).unwrap();
        let rebuilt = Client::new(client.name(), client.email(), document);

        assert_eq!(rebuilt.kind(), ClientKind::Individual);
        assert!(!rebuilt.is_same(&client));
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_valid_corporate() {
        let client = Client::corporate("Empresa XYZ", "contato@xyz.com", "12.345.678/0001-95");
        let result = ClientValidator::validate(&client);

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_cnpj_on_individual_is_malformed() {
        let client = Client::individual("Ana", "ana@email.com", "12.345.678/0001-95");
        let result = ClientValidator::validate(&client);

        assert!(!result.is_valid);
        assert!(result.errors[0].contains("must have 11 digits"));
    }

    #[test]
    fn test_invalid_cnpj_check_digits() {
        let client = Client::corporate("Empresa XYZ", "contato@xyz.com", "12.345.678/0001-99");
        let result = ClientValidator::validate(&client);

        assert!(!result.is_valid);
        assert!(result.errors[0].contains("CNPJ"));
    }

    #[test]
    fn test_ensure_valid_ok() {
        let client = Client::individual("Ana", "ana@email.com", "529.982.247-25");
        assert!(ClientValidator::ensure_valid(&client).is_ok());
    }

    #[test]
    fn test_ensure_valid_joins_errors() {
        let client = Client::individual("", "ana", "000.000.000-00");
        let err = ClientValidator::ensure_valid(&client).unwrap_err();

        let ClientError::ValidationFailed(message) = err;
        assert_eq!(message.matches("; ").count(), 2);
    }
}
