mod text_classification_relay_test;
