mod imports_tests;
