mod docling_document_test;
