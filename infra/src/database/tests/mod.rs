mod queries_tests;
